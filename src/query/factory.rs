//! Factory function for creating preference parser instances

use super::{ParserKind, PreferenceParser, SubstringPreferenceParser, WordBoundaryPreferenceParser};
use tracing::info;

/// Create a preference parser for the configured parser kind
pub fn create_preference_parser(kind: &ParserKind) -> Box<dyn PreferenceParser> {
    match kind {
        ParserKind::Substring => {
            info!("Creating substring preference parser");
            Box::new(SubstringPreferenceParser)
        }
        ParserKind::WordBoundary => {
            info!("Creating word-boundary preference parser");
            Box::new(WordBoundaryPreferenceParser)
        }
    }
}
