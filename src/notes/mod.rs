//! Review notes: the notebook, draft auto-tagging and markdown export.
//!
//! Notes come from two directions: transcript text filed under a review
//! category, and free-form typed notes whose draft buffer tags each new
//! point with the live playback time. The notebook keeps them in entry
//! order and can compile them into one block for the transformation
//! backend or export them as dated markdown.

pub mod draft;
mod export;

pub use draft::{apply_input, finalize, scan_tags};
pub use export::export_markdown;

/// Review category a selection can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    OpenPoint,
    PainPoint,
    RequirementPoint,
    ClientCurrentProcess,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::OpenPoint,
        Category::PainPoint,
        Category::RequirementPoint,
        Category::ClientCurrentProcess,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::OpenPoint => "Open Point",
            Category::PainPoint => "Pain Point",
            Category::RequirementPoint => "Requirement Point",
            Category::ClientCurrentProcess => "Client Current Process",
        }
    }

    /// Parse a label back into a category.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One review note, optionally filed under a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub text: String,
    pub category: Option<Category>,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn categorized(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category: Some(category),
        }
    }
}

/// Ordered collection of review notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteBook {
    pub notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append an uncategorized note.
    pub fn push(&mut self, text: impl Into<String>) {
        self.notes.push(Note::new(text));
    }

    /// Append a note filed under a category.
    pub fn push_categorized(&mut self, text: impl Into<String>, category: Category) {
        self.notes.push(Note::categorized(text, category));
    }

    /// Replace the text of the note at `index`, keeping its category.
    ///
    /// Returns false when the index is out of range.
    pub fn edit(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.notes.get_mut(index) {
            Some(note) => {
                note.text = text.into();
                true
            }
            None => false,
        }
    }

    /// All note texts joined with a blank line, ready for the
    /// transformation backend.
    pub fn compile(&self) -> String {
        self.notes
            .iter()
            .map(|n| n.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
