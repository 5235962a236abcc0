mod tokenizer;

pub use tokenizer::{has_text, tokenize};
