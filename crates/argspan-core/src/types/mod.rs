pub mod annotation;
pub mod sentence;
pub mod span;
pub mod tag;

pub use annotation::{AnnotationRecord, LayerAnnotation, TextSpan};
pub use sentence::{Sentence, Token};
pub use span::TokenSpan;
pub use tag::TaggedSequence;
