/// The page sections and the defect descriptions their annotations show
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Pricing,
    Profile,
    Data,
    Interactive,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Header,
        Section::Pricing,
        Section::Profile,
        Section::Data,
        Section::Interactive,
    ];

    /// Fragment id of the section on the page
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Pricing => "pricing",
            Section::Profile => "profile",
            Section::Data => "data",
            Section::Interactive => "interactive",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Header => "Navigation",
            Section::Pricing => "Our Products",
            Section::Profile => "Your Profile",
            Section::Data => "Activity Dashboard",
            Section::Interactive => "Quick Actions",
        }
    }
}

/// One known defect, shown by one overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Annotation {
    pub id: &'static str,
    pub section: Section,
    pub label: &'static str,
    pub description: &'static str,
}

const ANNOTATIONS: &[Annotation] = &[
    Annotation {
        id: "header-dropdown-z-index",
        section: Section::Header,
        label: "Products menu",
        description: "The Products dropdown menu appears behind the hero section below. The dropdown has z-index: 10 but the hero section has z-index: 20, so it's hidden underneath.",
    },
    Annotation {
        id: "header-broken-link",
        section: Section::Header,
        label: "Features link",
        description: "The 'Features' nav link points to '#broken', a section that doesn't exist on the page. It should link to a valid anchor or page.",
    },
    Annotation {
        id: "header-inconsistent-name",
        section: Section::Header,
        label: "Welcome message",
        description: "The header says 'Welcome, John' but the profile section below shows 'Jane Doe'. The user's name is inconsistent across the app.",
    },
    Annotation {
        id: "pricing-grid-columns",
        section: Section::Pricing,
        label: "Product grid",
        description: "The product grid uses 4 columns at tablet widths (md:grid-cols-4) for only 3 items. This creates an empty column and awkward spacing at medium viewport sizes.",
    },
    Annotation {
        id: "pricing-image-aspect",
        section: Section::Pricing,
        label: "Product image",
        description: "Product images are stretched and distorted. They use a fixed width and height without 'object-fit: cover', so the original aspect ratio is lost.",
    },
    Annotation {
        id: "pricing-title-overflow",
        section: Section::Pricing,
        label: "Product title",
        description: "This product title is very long and overflows its container. It's missing text truncation (e.g., overflow-hidden, text-overflow: ellipsis) so it pushes the layout.",
    },
    Annotation {
        id: "pricing-nan-price",
        section: Section::Pricing,
        label: "Price",
        description: "The price displays '$NaN' because the value is parsed from an empty string using parseInt(''). It should default to 0 or use a valid number.",
    },
    Annotation {
        id: "pricing-dead-button",
        section: Section::Pricing,
        label: "Add to Cart",
        description: "The 'Add to Cart' buttons have no click handler attached. Clicking them does absolutely nothing: no event listener is wired up.",
    },
    Annotation {
        id: "profile-inconsistent-name",
        section: Section::Profile,
        label: "Profile name",
        description: "The profile shows 'Jane Doe' but the navigation header says 'Welcome, John'. The user name is hardcoded differently in two places.",
    },
    Annotation {
        id: "profile-low-contrast",
        section: Section::Profile,
        label: "Member since",
        description: "This text uses 'text-gray-300' on a white background, which fails WCAG AA contrast requirements. The text is nearly invisible and should use a darker shade like text-gray-500.",
    },
    Annotation {
        id: "profile-modal-trap",
        section: Section::Profile,
        label: "Edit Profile",
        description: "Clicking 'Edit Profile' opens a modal dialog that has no close button and no way to dismiss it by clicking the backdrop. The user gets trapped.",
    },
    Annotation {
        id: "profile-dark-mode",
        section: Section::Profile,
        label: "Dark mode",
        description: "The dark mode toggle animates visually but never actually applies a 'dark' class to the document. The theme state changes in React but is never synced to the DOM.",
    },
    Annotation {
        id: "profile-missing-labels",
        section: Section::Profile,
        label: "Settings form",
        description: "The form inputs below have placeholder text but no associated <label> elements. This is an accessibility violation: screen readers can't identify what each field is for.",
    },
    Annotation {
        id: "data-console-errors",
        section: Section::Data,
        label: "Recent tasks",
        description: "Open the browser console (DevTools) and you'll see 'TODO: fix this pagination bug' logged on mount, plus an uncaught promise rejection from a fetch to a nonexistent API endpoint.",
    },
    Annotation {
        id: "data-direct-mutation",
        section: Section::Data,
        label: "Edit column",
        description: "Clicking the edit (pencil) icon on any row directly mutates the task object instead of using React setState. The title changes in memory but the component never re-renders to show the update.",
    },
    Annotation {
        id: "data-lorem-ipsum",
        section: Section::Data,
        label: "Task title",
        description: "This task title is placeholder 'Lorem ipsum' text that was never replaced with real content.",
    },
    Annotation {
        id: "data-todo-date",
        section: Section::Data,
        label: "Due date",
        description: "This date field shows 'TODO: Fix this date', placeholder text that was never replaced with an actual date value.",
    },
    Annotation {
        id: "data-pagination-off-by-one",
        section: Section::Data,
        label: "Pagination",
        description: "Pagination has an off-by-one error. Each page shows 6 items instead of 5, so the last item on page 1 also appears as the first item on page 2. The slice end index is start + perPage + 1 instead of start + perPage.",
    },
    Annotation {
        id: "data-comment-xss",
        section: Section::Data,
        label: "Comments",
        description: "Comments are rendered using dangerouslySetInnerHTML, which means raw HTML in user comments gets executed. This is an XSS vulnerability: Bob's comment injects HTML tags and an onerror handler.",
    },
    Annotation {
        id: "interactive-double-submit",
        section: Section::Interactive,
        label: "Newsletter",
        description: "The subscribe button has no loading state and is never disabled during submission. Rapid clicks will submit the form multiple times, causing duplicate subscriptions.",
    },
    Annotation {
        id: "interactive-timer-leak",
        section: Section::Interactive,
        label: "Countdown",
        description: "The countdown timer uses setInterval in a useEffect but never cleans it up. Even after hiding or unmounting the component, the interval keeps running in the background: a classic memory leak.",
    },
    Annotation {
        id: "interactive-eager-scroll",
        section: Section::Interactive,
        label: "Infinite scroll",
        description: "The infinite scroll handler is called immediately on component mount (before the user scrolls). This causes extra items to be loaded right away, even if the user hasn't scrolled to the bottom.",
    },
];

pub fn annotations() -> &'static [Annotation] {
    ANNOTATIONS
}

/// Annotations of one section, in page order
pub fn for_section(section: Section) -> Vec<Annotation> {
    ANNOTATIONS
        .iter()
        .filter(|a| a.section == section)
        .copied()
        .collect()
}

pub fn find(id: &str) -> Option<&'static Annotation> {
    ANNOTATIONS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = annotations().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), annotations().len());
    }

    #[test]
    fn test_every_section_is_annotated() {
        for section in Section::ALL {
            assert!(!for_section(section).is_empty(), "{:?}", section);
        }
    }

    #[test]
    fn test_sections_partition_catalog() {
        let total: usize = Section::ALL.iter().map(|s| for_section(*s).len()).sum();
        assert_eq!(total, annotations().len());
    }

    #[test]
    fn test_descriptions_present() {
        for annotation in annotations() {
            assert!(!annotation.description.trim().is_empty(), "{}", annotation.id);
            assert!(!annotation.label.trim().is_empty(), "{}", annotation.id);
        }
    }

    #[test]
    fn test_find() {
        let found = find("data-pagination-off-by-one").unwrap();
        assert_eq!(found.section, Section::Data);
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(find("header-broken-link").unwrap()).unwrap();

        assert!(json.contains("\"section\":\"header\""));
        assert!(json.contains("\"id\":\"header-broken-link\""));
    }
}
