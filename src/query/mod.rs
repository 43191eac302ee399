mod factory;
mod parser;

pub use factory::create_preference_parser;
pub use parser::{
    ParserKind, PreferenceParser, SubstringPreferenceParser, WordBoundaryPreferenceParser,
};
