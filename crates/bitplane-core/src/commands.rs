use std::path::Path;

use crate::api::evaluate::EvaluationReport;
use crate::api::hide::HideReport;
use crate::codec::{BitDepth, CodecOptions};
use crate::Result;

pub fn hide(
    carrier: &Path,
    payload: &Path,
    write_to_file: &Path,
    options: CodecOptions,
) -> Result<HideReport> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_carrier(carrier)
        .with_payload(payload)
        .with_output(write_to_file)
        .execute()
}

pub fn unveil(secret_media: &Path, output_file: &Path, options: CodecOptions) -> Result<()> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_file(output_file)
        .execute()
        .map(|_| ())
}

pub fn evaluate(
    reference: &Path,
    candidate: &Path,
    bit_depth: Option<BitDepth>,
) -> Result<EvaluationReport> {
    crate::api::evaluate::prepare()
        .with_reference(reference)
        .with_candidate(candidate)
        .use_bit_depth(bit_depth)
        .execute()
}
