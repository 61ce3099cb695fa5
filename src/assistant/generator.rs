use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::assistant::prompts::AnalysisKind;
use crate::error::{NutriError, Result};
use crate::metrics::extract_macros_with_source;
use crate::models::MacroBreakdown;

/// An uploaded dish photo, ready to hand to a multimodal model.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Mime type for an accepted image extension (jpg, jpeg, png).
    pub fn mime_for_path(path: &Path) -> Result<&'static str> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
            Some("png") => Ok("image/png"),
            _ => Err(NutriError::InvalidInput(format!(
                "Unsupported image type: {} (expected jpg, jpeg or png)",
                path.display()
            ))),
        }
    }

    /// Read an image file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = Self::mime_for_path(path)?;
        let data = fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), mime_type, "loaded image");
        Ok(Self::new(mime_type, data))
    }
}

/// The external text-generation model.
///
/// Implementations own transport, timeouts and retries, and should report
/// their own failures as [`NutriError::UpstreamFailure`].
pub trait TextGenerator {
    fn generate(
        &self,
        prompt: &str,
        image: Option<&ImagePayload>,
        instruction: &str,
    ) -> Result<String>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str, Option<&ImagePayload>, &str) -> Result<String>,
{
    fn generate(
        &self,
        prompt: &str,
        image: Option<&ImagePayload>,
        instruction: &str,
    ) -> Result<String> {
        self(prompt, image, instruction)
    }
}

/// Ask the model one of the fixed questions about a dish photo.
///
/// The instruction is dropped for kinds that do not accept one. An empty
/// answer counts as an upstream failure.
pub fn analyze_dish<G: TextGenerator + ?Sized>(
    generator: &G,
    kind: AnalysisKind,
    image: &ImagePayload,
    instruction: &str,
) -> Result<String> {
    let instruction = if kind.accepts_instruction() {
        instruction.trim()
    } else {
        ""
    };

    info!(?kind, has_instruction = !instruction.is_empty(), "requesting dish analysis");
    let text = generator.generate(kind.prompt(), Some(image), instruction)?;

    if text.trim().is_empty() {
        return Err(NutriError::UpstreamFailure(format!(
            "model returned an empty answer for {:?}",
            kind
        )));
    }

    Ok(text)
}

/// A nutrition narrative plus the macro split recovered from it.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionAnalysis {
    pub narrative: String,
    pub macros: MacroBreakdown,

    /// True when the answer held no percentages and the default split was used.
    pub fell_back: bool,
}

/// Run the nutrition prompt on a dish photo and extract the macro split.
pub fn analyze_nutrition<G: TextGenerator + ?Sized>(
    generator: &G,
    image: &ImagePayload,
) -> Result<NutritionAnalysis> {
    let narrative = analyze_dish(generator, AnalysisKind::Nutrition, image, "")?;
    let extraction = extract_macros_with_source(&narrative);
    Ok(NutritionAnalysis {
        narrative,
        macros: extraction.macros,
        fell_back: extraction.fell_back,
    })
}
