pub mod header;
pub mod meme_editor;
