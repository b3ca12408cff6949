use crate::domain::AppError;

use super::GenerationInputs;

/// Run the full generation against the fixture host and return the field text.
pub async fn execute(inputs: &GenerationInputs) -> Result<String, AppError> {
    let (request, generator) = inputs.load()?;
    generator.run_character_field_generation(&request).await
}
