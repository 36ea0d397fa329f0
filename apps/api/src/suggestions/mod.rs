// Project suggestions: static template catalog ranked against skills and
// research interests.

pub mod catalog;
pub mod handlers;
pub mod scorer;
