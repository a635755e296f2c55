pub mod answers;
pub mod translations;
pub mod words;
