//! Translates GraphQL-compiler Flow type declarations into a single
//! Reason-like source text blob: a typed data model plus runtime
//! conversion assets a host's JS/Reason runtime library can consume.
//!
//! The pipeline is two-phase, mirroring the teacher crate's lowering and
//! finalization split: [`extractor`] and [`property_mapper`] lower the
//! input [`ast::FlowModule`] into an [`model::IntermediateState`];
//! [`finalizer`] raises that into a [`model::FullState`] with every
//! nested type named; [`printer`] walks the full state and emits text.
//!
//! Parsing Flow source text into [`ast::FlowModule`] is out of scope
//! (spec §1 Non-goals) — callers supply an already-parsed module.

mod ast;
mod config;
mod error;
mod extractor;
mod finalizer;
mod model;
mod naming;
mod printer;
mod property_mapper;

pub use crate::ast::{FlowModule, FlowProperty, FlowType, TypeAlias};
pub use crate::config::{ConnectionConfig, OperationType, PrintConfig};
pub use crate::error::{Error, Result};

/// Runs the full pipeline: extract, finalize, print. The public entry
/// point takes an already-parsed `FlowModule` rather than raw source text
/// the way the spec's own `printFromFlowTypes(content: string, ...)`
/// does, because parsing Flow source is explicitly out of scope here
/// (spec §1, §6) — an upstream front-end owns that step.
pub fn print_from_flow_types(
    module: &FlowModule,
    operation_type: &OperationType,
    config: &PrintConfig,
) -> Result<String> {
    log::debug!("flow_reason_codegen: extracting {:?}", operation_type);
    let intermediate = extractor::extract(module, operation_type)?;

    log::debug!("flow_reason_codegen: finalizing");
    let full = finalizer::finalize(intermediate)?;

    log::debug!("flow_reason_codegen: emitting");
    printer::print_full_state(&full, operation_type, config)
}
