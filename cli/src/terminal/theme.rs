/// How the presentation layer colors its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Colored,
    Plain,
}

impl Theme {
    pub fn from_flag(plain: bool) -> Self {
        if plain { Theme::Plain } else { Theme::Colored }
    }

    /// Installs the theme process-wide.
    ///
    /// `Colored` keeps `colored`'s own detection (tty, `NO_COLOR`,
    /// `CLICOLOR_FORCE`); `Plain` turns every color off.
    pub fn apply(self) {
        if self == Theme::Plain {
            colored::control::set_override(false);
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
    }
}
