// src/mappings.rs
// =============================================================================
// This file holds the rename tables for the docs reorganization.
//
// The lessons used to live in numbered files under lektioner/del1..del4.
// They now live in four topic folders:
//   del1 -> grunderna, del2 -> koncept, del3 -> avancerat, del4 -> praktik
//
// Three tables drive the rewrite:
// - FULL_PATH_MAPPINGS: links that still spell out the old directory path
// - SIMPLE_MAPPINGS: same-folder links that only name the file
// - FOLDER_FIXUPS: links that now have to cross into the next topic folder
//
// Rust concepts:
// - const: Values baked into the binary at compile time
// - &[(&str, &str)]: A slice of string pairs (order matters, so no HashMap)
// =============================================================================

/// Old path under lektioner/ -> new path relative to docs/
pub const FULL_PATH_MAPPINGS: &[(&str, &str)] = &[
    // Del 1 -> Grunderna
    ("lektioner/del1/01-introduktion.md", "grunderna/introduktion.md"),
    ("lektioner/del1/02-klasser-objekt.md", "grunderna/klasser-objekt.md"),
    ("lektioner/del1/03-properties.md", "grunderna/properties.md"),
    ("lektioner/del1/04-metoder.md", "grunderna/metoder.md"),
    ("lektioner/del1/05-konstruktorer.md", "grunderna/konstruktorer.md"),
    ("lektioner/del1/06-inkapsling.md", "grunderna/inkapsling.md"),
    ("lektioner/del1/07-arv.md", "grunderna/arv.md"),
    ("lektioner/del1/08-polymorfism.md", "grunderna/polymorfism.md"),
    ("lektioner/del1/09-abstraktion.md", "grunderna/abstraktion.md"),
    ("lektioner/del1/10-interface.md", "grunderna/interface.md"),
    // Del 2 -> Koncept
    ("lektioner/del2/11-static.md", "koncept/static-vs-instance.md"),
    ("lektioner/del2/12-collections.md", "koncept/collections.md"),
    ("lektioner/del2/13-enums.md", "koncept/enums.md"),
    ("lektioner/del2/14-exceptions.md", "koncept/exceptions.md"),
    ("lektioner/del2/15-delegates.md", "koncept/delegates.md"),
    ("lektioner/del2/16-namespace.md", "koncept/namespace.md"),
    // Del 3 -> Avancerat
    ("lektioner/del3/17-modern-features.md", "avancerat/moderna-features.md"),
    ("lektioner/del3/18-primary-constructors.md", "avancerat/primary-constructors.md"),
    ("lektioner/del3/19-collection-expressions.md", "avancerat/collection-expressions.md"),
    ("lektioner/del3/20-records.md", "avancerat/records.md"),
    ("lektioner/del3/21-pattern-matching.md", "avancerat/pattern-matching.md"),
    ("lektioner/del3/22-nullable.md", "avancerat/nullable.md"),
    // Del 4 -> Praktik
    ("lektioner/del4/23-solid.md", "praktik/solid.md"),
    ("lektioner/del4/24-design-patterns.md", "praktik/design-patterns.md"),
    ("lektioner/del4/25-testing.md", "praktik/testing.md"),
    ("lektioner/del4/26-uml.md", "praktik/uml.md"),
    ("lektioner/del4/27-common-mistakes.md", "praktik/misstag.md"),
    ("lektioner/del4/28-projects.md", "praktik/projekt.md"),
];

/// Old file name -> new file name, for links inside the same folder
pub const SIMPLE_MAPPINGS: &[(&str, &str)] = &[
    ("01-introduktion.md", "introduktion.md"),
    ("02-klasser-objekt.md", "klasser-objekt.md"),
    ("03-properties.md", "properties.md"),
    ("04-metoder.md", "metoder.md"),
    ("05-konstruktorer.md", "konstruktorer.md"),
    ("06-inkapsling.md", "inkapsling.md"),
    ("07-arv.md", "arv.md"),
    ("08-polymorfism.md", "polymorfism.md"),
    ("09-abstraktion.md", "abstraktion.md"),
    ("10-interface.md", "interface.md"),
    ("11-static.md", "static-vs-instance.md"),
    ("12-collections.md", "collections.md"),
    ("13-enums.md", "enums.md"),
    ("14-exceptions.md", "exceptions.md"),
    ("15-delegates.md", "delegates.md"),
    ("16-namespace.md", "namespace.md"),
    ("17-modern-features.md", "moderna-features.md"),
    ("18-primary-constructors.md", "primary-constructors.md"),
    ("19-collection-expressions.md", "collection-expressions.md"),
    ("20-records.md", "records.md"),
    ("21-pattern-matching.md", "pattern-matching.md"),
    ("22-nullable.md", "nullable.md"),
    ("23-solid.md", "solid.md"),
    ("24-design-patterns.md", "design-patterns.md"),
    ("25-testing.md", "testing.md"),
    ("26-uml.md", "uml.md"),
    ("27-common-mistakes.md", "misstag.md"),
    ("28-projects.md", "projekt.md"),
];

// A literal replacement that only applies to files in one folder
//
// The last lesson of each part links to the first lesson of the next part.
// Before the move both were siblings; now they sit in different folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderFixup {
    /// Name of the directory the file must live in
    pub folder: &'static str,
    /// Exact substring to look for (includes the "](" prefix)
    pub from: &'static str,
    /// What to put in its place
    pub to: &'static str,
}

pub const FOLDER_FIXUPS: &[FolderFixup] = &[
    // Från grunderna till koncept
    FolderFixup { folder: "grunderna", from: "](11-static.md)", to: "](../koncept/static-vs-instance.md)" },
    FolderFixup { folder: "grunderna", from: "](static-vs-instance.md)", to: "](../koncept/static-vs-instance.md)" },
    // Från koncept till avancerat
    FolderFixup { folder: "koncept", from: "](17-modern-features.md)", to: "](../avancerat/moderna-features.md)" },
    FolderFixup { folder: "koncept", from: "](moderna-features.md)", to: "](../avancerat/moderna-features.md)" },
    // Från avancerat till praktik
    FolderFixup { folder: "avancerat", from: "](23-solid.md)", to: "](../praktik/solid.md)" },
    FolderFixup { folder: "avancerat", from: "](solid.md)", to: "](../praktik/solid.md)" },
];

/// The topic folders under docs/, in the order they are processed
pub const TOPIC_FOLDERS: &[&str] = &["grunderna", "koncept", "avancerat", "praktik"];

/// Files directly under docs/ that are processed when they exist
pub const INDEX_FILES: &[&str] = &["index.md", "kursoversikt.md"];
