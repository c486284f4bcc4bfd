use super::model::SentimentModel;
use super::pipeline::SentimentPipeline;
use crate::error::Result;
use crate::models::TfidfLinearOptions;
use crate::pipelines::cache::ModelOptions;
use crate::pipelines::utils::{BasePipelineBuilder, DeviceRequest, StandardPipelineBuilder};
use crate::text::TextNormalizer;

crate::pipelines::utils::impl_device_methods!(delegated: SentimentPipelineBuilder<M: SentimentModel>);

/// Builder for creating [`SentimentPipeline`] instances.
///
/// Use [`Self::tfidf_linear`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use sentiment_pipeline::sentiment::{SentimentPipelineBuilder, TfidfLinearOptions};
/// # fn main() -> sentiment_pipeline::error::Result<()> {
/// let pipeline =
///     SentimentPipelineBuilder::tfidf_linear(TfidfLinearOptions::from_dir("artifacts"))
///         .cpu()
///         .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipelineBuilder<M: SentimentModel>(StandardPipelineBuilder<M::Options>);

impl<M: SentimentModel> SentimentPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self(StandardPipelineBuilder::new(options))
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if artifact loading, resource loading, or device
    /// initialization fails.
    pub fn build(self) -> Result<SentimentPipeline<M>>
    where
        M: Clone + Send + Sync + 'static,
        M::Options: ModelOptions + Clone,
    {
        BasePipelineBuilder::build(self)
    }
}

impl<M: SentimentModel> BasePipelineBuilder<M> for SentimentPipelineBuilder<M>
where
    M: Clone + Send + Sync + 'static,
    M::Options: ModelOptions + Clone,
{
    type Model = M;
    type Pipeline = SentimentPipeline<M>;
    type Options = M::Options;

    fn options(&self) -> &Self::Options {
        &self.0.options
    }

    fn device_request(&self) -> &DeviceRequest {
        &self.0.device_request
    }

    fn create_model(options: Self::Options, device: candle_core::Device) -> Result<M> {
        M::new(options, device)
    }

    fn get_normalizer(options: Self::Options) -> Result<TextNormalizer> {
        M::get_normalizer(options)
    }

    fn construct_pipeline(model: M, normalizer: TextNormalizer) -> Result<Self::Pipeline> {
        Ok(SentimentPipeline { model, normalizer })
    }
}

impl SentimentPipelineBuilder<super::TfidfLinear> {
    /// Creates a builder over exported TF-IDF + linear-classifier artifacts.
    pub fn tfidf_linear(options: TfidfLinearOptions) -> Self {
        Self::new(options)
    }
}
