mod word_packing_splitter;

pub use word_packing_splitter::WordPackingSplitter;
