// Résumé extraction: text segmentation and heuristic field extraction.
// Everything below `handlers` is synchronous and never fails.

pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod lines;
pub mod machine;
pub mod models;
pub mod name;
pub mod pipeline;
pub mod projects;
pub mod sections;
pub mod skills;
