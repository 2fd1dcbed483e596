use std::path::{Path, PathBuf};

use log::info;

use crate::codec::BitDepth;
use crate::fidelity::{classify, compare, Metrics, QualityBasis, QualityLabel};
use crate::media::{io, Bt709Normalizer, ColorNormalizer};
use crate::{BitPlaneError, Result};

pub fn prepare() -> EvaluateApi {
    EvaluateApi::default()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport {
    pub metrics: Metrics,
    pub quality: QualityLabel,
    /// what `quality` was derived from
    pub basis: QualityBasis,
}

/// Compares a candidate image, for example an unveiled payload, with its reference.
#[derive(Default, Debug)]
pub struct EvaluateApi {
    reference: Option<PathBuf>,
    candidate: Option<PathBuf>,
    bit_depth: Option<BitDepth>,
}

impl EvaluateApi {
    /// The original image
    pub fn with_reference(mut self, reference: impl AsRef<Path>) -> Self {
        self.reference = Some(reference.as_ref().to_path_buf());
        self
    }

    /// The image measured against the reference, converted to the reference's channel layout
    pub fn with_candidate(mut self, candidate: impl AsRef<Path>) -> Self {
        self.candidate = Some(candidate.as_ref().to_path_buf());
        self
    }

    /// Judge the quality by the bit depth instead of the PSNR.
    /// If `None` is passed, the PSNR decides
    pub fn use_bit_depth(mut self, bit_depth: Option<BitDepth>) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn execute(self) -> Result<EvaluationReport> {
        let Some(reference) = self.reference else {
            return Err(BitPlaneError::ReferenceNotSet);
        };
        let Some(candidate) = self.candidate else {
            return Err(BitPlaneError::CandidateNotSet);
        };

        let reference = io::load(&reference)?;
        let candidate = Bt709Normalizer.normalize(&io::load(&candidate)?, reference.layout())?;
        let metrics = compare(&reference, &candidate)?;
        let basis = match self.bit_depth {
            Some(k) => QualityBasis::BitDepth(k),
            None => QualityBasis::from(metrics),
        };
        let quality = classify(basis);
        info!("evaluated {}: {metrics}, quality {quality}", reference.shape());

        Ok(EvaluationReport {
            metrics,
            quality,
            basis,
        })
    }
}
