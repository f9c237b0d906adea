/// Added to the scroll offset so a section counts as active slightly before its top edge
/// reaches the viewport top.
pub const LOOKAHEAD: f64 = 200.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    About,
    Experience,
    Work,
    Writing,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::About,
        Self::Experience,
        Self::Work,
        Self::Writing,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Work => "work",
            Self::Writing => "writing",
            Self::Contact => "contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Work => "Selected Work",
            Self::Writing => "Writing",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn contains(self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    active: Section,
}

impl ScrollSpy {
    pub fn active(self) -> Section {
        self.active
    }

    /// Picks the first section whose extent holds `scroll_y + LOOKAHEAD`. When nothing matches
    /// the previous pick stays. Sections `extent_of` cannot measure are skipped.
    pub fn observe<F>(&mut self, scroll_y: f64, extent_of: F) -> Section
    where
        F: Fn(Section) -> Option<Extent>,
    {
        let probe = scroll_y + LOOKAHEAD;

        if let Some(section) = Section::ALL
            .into_iter()
            .find(|section| extent_of(*section).is_some_and(|extent| extent.contains(probe)))
        {
            self.active = section;
        }

        self.active
    }
}
