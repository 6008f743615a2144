//! Keybinding settings registered at runtime.
//!
//! These are not part of the builtin table: like plugin or widget settings,
//! they are registered against freshly allocated slots before any source is
//! resolved, so every resolver and view picks them up.

use optlayer::{OptionType, Registry, Value};

use crate::error::CliError;

/// Name, default binding and description of each keybinding setting.
pub const KEYBINDINGS: &[(&str, &str, &str)] = &[
    (
        "kb-primary-paste",
        "Control+V,Shift+Insert",
        "Paste primary selection",
    ),
    ("kb-secondary-paste", "Control+v,Insert", "Paste clipboard"),
    ("kb-clear-line", "Control+w", "Clear input line"),
    ("kb-move-front", "Control+a", "Beginning of line"),
    ("kb-move-end", "Control+e", "End of line"),
    (
        "kb-accept-entry",
        "Control+j,Control+m,Return,KP_Enter",
        "Accept entry",
    ),
    (
        "kb-cancel",
        "Escape,Control+g,Control+bracketleft",
        "Quit rofi",
    ),
    ("kb-mode-next", "Shift+Right,Control+Tab", "Switch to the next mode"),
    ("kb-row-up", "Up,Control+p,ISO_Left_Tab", "Select previous entry"),
    ("kb-row-down", "Down,Control+n", "Select next entry"),
];

/// Register every keybinding setting with its default binding.
pub fn register_keybindings(registry: &mut Registry) -> Result<(), CliError> {
    for &(name, binding, comment) in KEYBINDINGS {
        let slot = registry.alloc_slot(Value::Str(Some(binding.to_string())));
        registry.register(OptionType::String, name, slot, comment)?;
    }
    Ok(())
}
