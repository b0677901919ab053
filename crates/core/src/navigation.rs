//! Which page section is highlighted in the header.
//!
//! The page is a single scrolling document split into named sections. The
//! active section changes only when the visitor picks one from the menu; the
//! scroll position never feeds back into it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named region of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Delivery,
    Reviews,
    Contacts,
}

/// The slug did not name any known section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl Section {
    /// All sections, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Catalog,
        Self::Delivery,
        Self::Reviews,
        Self::Contacts,
    ];

    /// URL slug, also used as the HTML anchor id.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::Delivery => "delivery",
            Self::Reviews => "reviews",
            Self::Contacts => "contacts",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::Delivery => "Доставка",
            Self::Reviews => "Отзывы",
            Self::Contacts => "Контакты",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// The currently highlighted section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    active: Section,
}

impl NavigationState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Section::Home,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }

    /// Make the section named by `slug` active.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSection` and leaves the state untouched if the slug
    /// isn't one of [`Section::ALL`].
    pub fn select(&mut self, slug: &str) -> Result<Section, UnknownSection> {
        let section = slug.parse::<Section>()?;
        self.active = section;
        Ok(section)
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}
