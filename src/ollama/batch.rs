use crate::{
    error::Result,
    models::{BatchGenerateImageConfig, BatchGenerateImageResult},
};

use super::ImageGenerator;

/// Runs every prompt `count_per_prompt` times, one request at a time.
///
/// Results come back grouped per prompt in input order. The progress callback
/// fires right after each generation, before the next request goes out. The
/// first failed request aborts the batch and its error is returned as-is.
pub async fn run_batch<G>(
    generator: &G,
    mut config: BatchGenerateImageConfig,
) -> Result<Vec<BatchGenerateImageResult>>
where
    G: ImageGenerator + ?Sized,
{
    let total = config.total()?;
    let mut on_progress = config.on_progress.take();
    let mut completed = 0;

    log::debug!(
        "Starting batch: {} prompts x {} = {} images",
        config.prompts.len(),
        config.count_per_prompt,
        total
    );

    let mut batch_results = Vec::with_capacity(config.prompts.len());

    for prompt in &config.prompts {
        let mut results = Vec::new();

        for _ in 0..config.count_per_prompt {
            let result = generator.generate(config.request_for(prompt)).await?;
            results.push(result);
            completed += 1;

            log::debug!("Batch progress: {}/{}", completed, total);
            if let Some(callback) = on_progress.as_mut() {
                callback(completed, total);
            }
        }

        batch_results.push(BatchGenerateImageResult {
            prompt: prompt.clone(),
            results,
        });
    }

    Ok(batch_results)
}
