//! The builtin option table.

use super::types::Value;

/// Initial state of a builtin row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    /// String setting; `None` leaves it unset.
    Str(Option<&'static str>),
    /// Unsigned number setting.
    Unsigned(u32),
    /// Signed number setting.
    Signed(i32),
    /// Boolean setting.
    Bool(bool),
    /// Character setting.
    Char(char),
    /// Shares the slot (and type) of the named row.
    AliasOf(&'static str),
}

impl Init {
    /// The slot value this row starts with, or `None` for an alias.
    #[must_use]
    pub fn value(self) -> Option<Value> {
        match self {
            Self::Str(s) => Some(Value::Str(s.map(str::to_owned))),
            Self::Unsigned(n) => Some(Value::Unsigned(n)),
            Self::Signed(n) => Some(Value::Signed(n)),
            Self::Bool(b) => Some(Value::Bool(b)),
            Self::Char(c) => Some(Value::Char(c)),
            Self::AliasOf(_) => None,
        }
    }
}

/// One row of a builtin option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinOption {
    /// Configuration key.
    pub name: &'static str,
    /// Initial value or alias target.
    pub init: Init,
    /// Description shown by the views.
    pub comment: &'static str,
}

const fn opt(name: &'static str, init: Init, comment: &'static str) -> BuiltinOption {
    BuiltinOption {
        name,
        init,
        comment,
    }
}

/// Standard builtin settings.
///
/// An alias row must sit directly before or after the row it aliases so the
/// text views render the pair once.
pub const BUILTIN_OPTIONS: &[BuiltinOption] = &[
    opt("switchers", Init::AliasOf("modi"), ""),
    opt("modi", Init::Str(Some("window,run,ssh")), "Enabled modi"),
    opt("width", Init::Signed(50), "Window width"),
    opt("lines", Init::Unsigned(15), "Number of lines"),
    opt("columns", Init::Unsigned(1), "Number of columns"),
    opt("font", Init::Str(Some("mono 12")), "Font to use"),
    opt("location", Init::Unsigned(0), "Location on screen"),
    opt("yoffset", Init::Signed(0), "Y-offset relative to location"),
    opt("xoffset", Init::Signed(0), "X-offset relative to location"),
    opt("fixed-num-lines", Init::Bool(true), "Always show number of lines"),
    opt("terminal", Init::Str(Some("rofi-sensible-terminal")), "Terminal to use"),
    opt("ssh-client", Init::Str(Some("ssh")), "Ssh client to use"),
    opt(
        "ssh-command",
        Init::Str(Some("{terminal} -e {ssh-client} {host}")),
        "Ssh command to execute",
    ),
    opt("run-command", Init::Str(Some("{cmd}")), "Run command to execute"),
    opt(
        "run-list-command",
        Init::Str(Some("")),
        "Command to get extra run targets",
    ),
    opt(
        "run-shell-command",
        Init::Str(Some("{terminal} -e {cmd}")),
        "Run command to execute that runs in shell",
    ),
    opt(
        "window-command",
        Init::Str(Some("xkill -id {window}")),
        "Command executed on accept-entry-custom for window modus",
    ),
    opt("disable-history", Init::Bool(false), "Disable history in run/ssh"),
    opt("sort", Init::Bool(false), "Use sorting"),
    opt(
        "levenshtein-sort",
        Init::Bool(false),
        "Use levenshtein sorting also for fuzzy matching",
    ),
    opt("case-sensitive", Init::Bool(false), "Set case-sensitivity"),
    opt("cycle", Init::Bool(true), "Cycle through the results list"),
    opt("sidebar-mode", Init::Bool(false), "Enable sidebar-mode"),
    opt("eh", Init::Signed(1), "Row height (in chars)"),
    opt("auto-select", Init::Bool(false), "Enable auto select mode"),
    opt("parse-hosts", Init::Bool(false), "Parse hosts file for ssh mode"),
    opt(
        "parse-known-hosts",
        Init::Bool(true),
        "Parse known_hosts file for ssh mode",
    ),
    opt(
        "combi-modi",
        Init::Str(Some("window,run")),
        "Set the modi to combine in combi mode",
    ),
    opt(
        "matching",
        Init::Str(Some("normal")),
        "Set the matching algorithm. (normal, regex, glob, fuzzy)",
    ),
    opt("tokenize", Init::Bool(true), "Tokenize input string"),
    opt("monitor", Init::Str(Some("-5")), ""),
    opt("m", Init::AliasOf("monitor"), "Monitor id to show on"),
    opt("filter", Init::Str(None), "Pre-set filter"),
    opt("fullscreen", Init::Bool(false), "Fullscreen"),
    opt("dpi", Init::Signed(-1), "DPI"),
    opt("threads", Init::Unsigned(0), "Threads to use for string matching"),
    opt(
        "scroll-method",
        Init::Unsigned(0),
        "Scrolling method. (0: Page, 1: Centered)",
    ),
    opt(
        "window-format",
        Init::Str(Some("{w}    {c}   {t}")),
        "Window Format. w (desktop name), t (title), n (name), r (role), c (class)",
    ),
    opt(
        "click-to-exit",
        Init::Bool(true),
        "Click outside the window to exit",
    ),
    opt(
        "show-match",
        Init::Bool(true),
        "Indicate how it match by underlining it.",
    ),
    opt("theme", Init::Str(None), "New style theme file"),
    opt("color-normal", Init::Str(None), "Color scheme for normal row"),
    opt("color-urgent", Init::Str(None), "Color scheme for urgent row"),
    opt("color-active", Init::Str(None), "Color scheme for active row"),
    opt("color-window", Init::Str(None), "Color scheme window"),
    opt(
        "plugin-path",
        Init::Str(Some("/usr/lib/rofi")),
        "Directory containing plugins",
    ),
    opt("sep", Init::Char('\n'), "Element separator"),
];
