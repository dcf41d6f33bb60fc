pub mod scorer;
pub mod tokenizer;
