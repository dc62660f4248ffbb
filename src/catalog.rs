/// A catalog entry the user can log. The icon is an opaque glyph passed
/// through to the page untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityTemplate {
    pub name: &'static str,
    pub points: u64,
    pub icon: &'static str,
}

/// The fixed set of activities. Names are unique and act as the lookup key;
/// order here is the order the page shows them in.
pub const CATALOG: [ActivityTemplate; 8] = [
    ActivityTemplate { name: "Used reusable bag", points: 5, icon: "\u{1f6cd}\u{fe0f}" },
    ActivityTemplate { name: "Recycled waste", points: 10, icon: "\u{267b}\u{fe0f}" },
    ActivityTemplate { name: "Biked instead of driving", points: 15, icon: "\u{1f6b4}" },
    ActivityTemplate { name: "Used public transport", points: 10, icon: "\u{1f68c}" },
    ActivityTemplate { name: "Saved water", points: 8, icon: "\u{1f4a7}" },
    ActivityTemplate { name: "Planted a tree", points: 20, icon: "\u{1f333}" },
    ActivityTemplate { name: "Composted food waste", points: 12, icon: "\u{1f331}" },
    ActivityTemplate { name: "Used reusable bottle", points: 5, icon: "\u{1f376}" },
];

/// Exact-match lookup by name. Names are unique, so at most one entry matches.
pub fn find(name: &str) -> Option<&'static ActivityTemplate> {
    CATALOG.iter().find(|template| template.name == name)
}
