use super::{build_cache_key, DeviceRequest};
use crate::error::Result;
use crate::pipelines::cache::{global_cache, ModelOptions};
use crate::text::TextNormalizer;

/// Shared build flow for pipelines: resolve the device, load the model
/// through the process-wide cache, build the text normalizer, assemble.
pub trait BasePipelineBuilder<M>: Sized
where
    M: Clone + Send + Sync + 'static,
{
    /// Model type the pipeline wraps.
    type Model: Clone + Send + Sync + 'static;
    /// Assembled pipeline type.
    type Pipeline;
    /// Options identifying the artifacts to load.
    type Options: ModelOptions + Clone;

    /// The configured options.
    fn options(&self) -> &Self::Options;

    /// The configured device request.
    fn device_request(&self) -> &DeviceRequest;

    /// Load the model described by `options` onto `device`.
    fn create_model(options: Self::Options, device: candle_core::Device) -> Result<M>;

    /// Build the normalizer matching the model's training-time cleaning.
    fn get_normalizer(options: Self::Options) -> Result<TextNormalizer>;

    /// Assemble the pipeline from its parts.
    fn construct_pipeline(model: M, normalizer: TextNormalizer) -> Result<Self::Pipeline>;

    /// Run the build flow.
    fn build(self) -> Result<Self::Pipeline> {
        let device = self.device_request().clone().resolve()?;

        let key = build_cache_key(self.options(), &device);

        let model = global_cache().get_or_create(&key, || {
            Self::create_model(self.options().clone(), device.clone())
        })?;

        let normalizer = Self::get_normalizer(self.options().clone())?;

        Self::construct_pipeline(model, normalizer)
    }
}

/// Common builder state: options plus device request.
pub struct StandardPipelineBuilder<Opts> {
    pub(crate) options: Opts,
    pub(crate) device_request: DeviceRequest,
}

impl<Opts> StandardPipelineBuilder<Opts> {
    pub(crate) fn new(options: Opts) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Cpu,
        }
    }

    pub(crate) fn device_request_mut(&mut self) -> &mut DeviceRequest {
        &mut self.device_request
    }
}
