use crate::cmds::{Cmd, CmdResult};
use crate::context::PickerContext;

// Receivers consume the commands they understand and hand everything else
// back unchanged, so several of them can be chained over one context.
pub trait Control {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut PickerContext) -> CmdResult;
}
