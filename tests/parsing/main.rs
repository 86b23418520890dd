mod builder;
mod properties;
mod reducer;
mod tokenizer;
