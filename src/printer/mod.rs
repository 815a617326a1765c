//! The emitter (spec §4.5): walks a `FullState` in a fixed section order
//! and produces a single text blob.

mod converters;
mod enums;
mod fragment_refs;
mod operation_kind;
mod operations;
mod record;
mod render;
mod types;
mod unions;
mod utils;

use crate::config::{OperationType, PrintConfig};
use crate::error::{Error, Result};
use crate::model::FullState;
use render::NameLookup;

/// Accumulates the emitted sections in order. Generalizes the teacher's
/// `proc_macro2::TokenStream` accumulation (`quote!` appended to a
/// running stream) to plain text, since the target here is Reason-like
/// source rather than Rust tokens.
#[derive(Default)]
struct Builder {
    buf: String,
}

impl Builder {
    fn section(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            return;
        }
        self.buf.push_str(text);
        if !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Walks `full` in the emitter's strict section order and produces the
/// generated source text (spec §4.5).
pub fn print_full_state(full: &FullState, operation_type: &OperationType, config: &PrintConfig) -> Result<String> {
    if full.fragment.is_none() && full.response.is_none() && full.variables.is_none() {
        return Err(Error::NoExtractableOperationsFound);
    }

    log::debug!("emitting header");
    let mut builder = Builder::default();
    builder.section("/* @generated */\n");

    log::debug!("emitting enums, {} found", full.enums.len());
    for enm in &full.enums {
        builder.section(enums::print_enum(enm));
    }

    let names = NameLookup::build(full);

    log::debug!("emitting Unions module, {} found", full.unions.len());
    if let Some(unions_module) = unions::print_unions_module(full, &names) {
        builder.section(unions_module);
    }

    log::debug!("emitting Types module");
    if let Some(types_module) = types::print_types_module(full, &names) {
        builder.section(types_module);
    }

    log::debug!("emitting operation roots");
    builder.section(operations::print_roots(full, operation_type, &names));

    log::debug!("emitting Internal converter module");
    builder.section(converters::print_internal_module(full, operation_type, &names));

    log::debug!("emitting fragment-ref assets");
    if let Some(fragment_refs) = fragment_refs::print_fragment_ref_assets(full.fragment.as_ref()) {
        builder.section(fragment_refs);
    }

    log::debug!("emitting Utils module");
    if let Some(utils_module) = utils::print_utils_module(full, config) {
        builder.section(utils_module);
    }

    log::debug!("emitting operation-type trailer");
    builder.section(operation_kind::print_operation_type_descriptor(operation_type));

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjectShape, PropType, PropValue, PropValues, Scalar};

    #[test]
    fn no_roots_fails_with_no_extractable_operations_found() {
        let full = FullState::default();
        let config = PrintConfig::default();
        let result = print_full_state(&full, &OperationType::Query("Q".to_string()), &config);
        assert_eq!(Err(Error::NoExtractableOperationsFound), result);
    }

    #[test]
    fn sections_appear_in_order() {
        let mut full = FullState::default();
        full.enums.push(crate::model::FullEnum { name: "Status".to_string(), values: vec!["ACTIVE".to_string()] });
        full.response = Some(ObjectShape::new(
            vec!["response".to_string()],
            vec![PropValues::Prop(
                "id".to_string(),
                PropValue { nullable: false, prop_type: PropType::Scalar(Scalar::String) },
            )],
        ));
        let config = PrintConfig::default();
        let printed = print_full_state(&full, &OperationType::Query("Q".to_string()), &config).unwrap();

        let header_pos = printed.find("@generated").unwrap();
        let enum_pos = printed.find("type status").unwrap();
        let response_pos = printed.find("type response").unwrap();
        let internal_pos = printed.find("module Internal").unwrap();
        let trailer_pos = printed.find("let operationType").unwrap();

        assert!(header_pos < enum_pos);
        assert!(enum_pos < response_pos);
        assert!(response_pos < internal_pos);
        assert!(internal_pos < trailer_pos);
    }
}
