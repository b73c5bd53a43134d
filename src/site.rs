//! # Site Directory
//!
//! Static branding, navigation and contact data shown in the site footer.
//! Served as-is to the front end; nothing here is computed.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Route,
    Web,
    Mailto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteLink {
    pub label: &'static str,
    pub target: &'static str,
    pub kind: LinkKind,
}

impl SiteLink {
    const fn route(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            kind: LinkKind::Route,
        }
    }

    const fn web(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            kind: LinkKind::Web,
        }
    }

    const fn mailto(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            kind: LinkKind::Mailto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDirectory {
    pub organization: &'static str,
    pub tagline: &'static str,
    pub events: &'static [SiteLink],
    pub support: &'static [SiteLink],
    pub contacts: &'static [SiteLink],
    pub social: &'static [SiteLink],
}

const EVENTS: &[SiteLink] = &[
    SiteLink::route("Saravanampatti Blasters League", "/sbl"),
    SiteLink::route("Kattanji Hills Marathon", "/kattanji-marathon"),
];

const SUPPORT: &[SiteLink] = &[
    SiteLink::route("Privacy Policy", "/privacy-policy"),
    SiteLink::route("Terms & Conditions", "/terms-conditions"),
    SiteLink::route("Refund Policy", "/refund-policy"),
    SiteLink::route("Contact Support", "/contact-support"),
];

const CONTACTS: &[SiteLink] = &[
    SiteLink::web("www.westernghatsx.in", "https://www.westernghatsx.in"),
    SiteLink::mailto("info@westernghatsx.in", "mailto:info@westernghatsx.in"),
];

const SOCIAL: &[SiteLink] = &[
    SiteLink::web("Facebook", "https://facebook.com/westernghatsx"),
    SiteLink::web("Instagram", "https://instagram.com/westernghatsx"),
    SiteLink::web("Twitter", "https://twitter.com/westernghatsx"),
    SiteLink::mailto("Email", "mailto:info@westernghatsx.in"),
];

static DIRECTORY: SiteDirectory = SiteDirectory {
    organization: "Western Ghats X",
    tagline: "Creating awareness about the mountain, its water streams, and nature to the locals. \
              Together, we're working to restore the natural flow of streams in the Kattanji Hills \
              through environmental conservation and community engagement.",
    events: EVENTS,
    support: SUPPORT,
    contacts: CONTACTS,
    social: SOCIAL,
};

pub fn directory() -> &'static SiteDirectory {
    &DIRECTORY
}

impl SiteDirectory {
    /// In-site routes: the event pages followed by the support pages
    pub fn routes(&self) -> impl Iterator<Item = &SiteLink> {
        self.events.iter().chain(self.support.iter())
    }

    /// Links that leave the site (web pages and mail clients)
    pub fn outbound(&self) -> impl Iterator<Item = &SiteLink> {
        self.contacts.iter().chain(self.social.iter())
    }
}
