use crate::cmds::{Cmd, CmdResult};
use crate::context::PickerContext;
use crate::ctrl::Control;
use crate::overlay::position::{self, OverlayStyle};
use crate::overlay::region::{InteractionSite, RegionId, RegionSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityState {
    Hidden,
    Visible,
}

// Every transition here is idempotent. Showing while visible or hiding
// while hidden does nothing, and the dismiss listener is attached and
// detached exactly once per session however the session ends.
pub struct OverlayControl {
    state: VisibilityState,
    regions: RegionSet,
    style: Option<OverlayStyle>,
    listener_attached: bool,
    marker: bool,
}

impl Default for OverlayControl {
    fn default() -> Self {
        OverlayControl {
            state: VisibilityState::Hidden,
            regions: RegionSet::fresh(),
            style: None,
            listener_attached: false,
            marker: false,
        }
    }
}

impl Control for OverlayControl {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut PickerContext) -> CmdResult {
        match cmd {
            Cmd::ShowPicker => {
                self.show(context);
                Ok(Cmd::Noop)
            }
            Cmd::HidePicker => {
                self.hide(context);
                Ok(Cmd::Noop)
            }
            Cmd::Interaction(target) => {
                self.interaction(*target, context);
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}

impl OverlayControl {
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Visible
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn style(&self) -> Option<&OverlayStyle> {
        self.style.as_ref()
    }

    pub fn marker_active(&self) -> bool {
        self.marker
    }

    fn show(&mut self, context: &mut PickerContext) {
        if self.state == VisibilityState::Visible {
            return;
        }

        let style = self.resolve_placement(context);
        self.style = Some(style);

        context.host_mut().mount_overlay(&style);
        if context.config().backdrop {
            context.host_mut().mount_backdrop();
        }
        self.set_marker(true, context);
        self.attach_listener(context);

        context.align_cursor_to_selection();
        self.state = VisibilityState::Visible;
    }

    // falls back when the anchor never got laid out and the config asks
    // for the overlay to be forced visible anyway
    fn resolve_placement(&self, context: &mut PickerContext) -> OverlayStyle {
        let anchor = context.host().measure_anchor();
        let computed = position::place(&anchor, context.host().viewport_height());

        if context.config().force_display_element
            && anchor.is_degenerate()
            && !context.host().anchor_visible()
        {
            context.host_mut().force_anchor_visible();
            context.host_mut().set_anchor_interactive(true);
            let fallback = context.host().fallback_position();
            return position::place_fallback(computed, fallback);
        }

        computed
    }

    fn interaction(&mut self, target: Option<RegionId>, context: &mut PickerContext) {
        if self.state != VisibilityState::Visible {
            return;
        }

        match self.regions.classify(target) {
            InteractionSite::Anchor | InteractionSite::Overlay => {}
            InteractionSite::Backdrop | InteractionSite::Outside => {
                log::debug!("Interaction outside the picker, dismissing");
                context.restore_cursor();
                context.close_month_list();
                context.close_year_list();
                self.hide(context);
            }
        }
    }

    fn hide(&mut self, context: &mut PickerContext) {
        if self.state == VisibilityState::Hidden {
            return;
        }

        self.teardown(context);
        self.state = VisibilityState::Hidden;
    }

    // teardown shared by an ordinary hide and the drop path
    pub(crate) fn dismantle(&mut self, context: &mut PickerContext) {
        self.hide(context);
    }

    fn teardown(&mut self, context: &mut PickerContext) {
        self.detach_listener(context);
        context.host_mut().unmount_overlay();
        if context.config().backdrop {
            context.host_mut().unmount_backdrop();
        }
        self.set_marker(false, context);
        self.style = None;
    }

    fn attach_listener(&mut self, context: &mut PickerContext) {
        if !self.listener_attached {
            context.host_mut().attach_dismiss_listener();
            self.listener_attached = true;
        }
    }

    fn detach_listener(&mut self, context: &mut PickerContext) {
        if self.listener_attached {
            context.host_mut().detach_dismiss_listener();
            self.listener_attached = false;
        }
    }

    fn set_marker(&mut self, showing: bool, context: &mut PickerContext) {
        if self.marker != showing {
            self.marker = showing;
            context.host_mut().marker_changed(showing);
        }
    }
}
