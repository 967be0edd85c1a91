use super::{FloatingCalendarApp, WindowMode};

/// Shortcuts pressed during one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct ShortcutFlags {
    pub clear: bool,
    pub today: bool,
    pub copy: bool,
    pub export: bool,
}

impl ShortcutFlags {
    pub(super) fn from_input(i: &egui::InputState) -> Self {
        let chord = i.modifiers.command && i.modifiers.shift;
        // egui-winit turns Ctrl+C into a Copy event before it reaches key handling
        let copy_event = i.modifiers.shift && i.events.iter().any(|e| matches!(e, egui::Event::Copy));

        Self {
            clear: i.key_pressed(egui::Key::Escape),
            today: i.key_pressed(egui::Key::T) && i.modifiers.is_none(),
            copy: (chord && i.key_pressed(egui::Key::C)) || copy_event,
            export: chord && i.key_pressed(egui::Key::E),
        }
    }
}

impl FloatingCalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.state.mode != WindowMode::Full {
            return;
        }

        // Read first; the actions below send viewport commands through ctx
        let flags = ctx.input(ShortcutFlags::from_input);

        if flags.clear {
            self.clear_selection();
        }
        if flags.today {
            self.jump_to_today();
        }
        if flags.copy {
            self.copy_selection(ctx);
        }
        if flags.export {
            self.export_selection_csv();
        }
    }
}
