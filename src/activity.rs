use crate::adder::NativeAdder;
use crate::config::SampleConfig;
use crate::error::{PresentationError, SampleResult};
use crate::loader::{LibrarySource, NativeLibrary};
use crate::logging::log_info;
use crate::presentation::{FieldId, MessageSurface, SumPresenter};

/// Outcome of a click on a known view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The trigger ran and displayed this sum.
    Sum(i32),
    /// The trigger ran but an input was rejected; a hint was displayed.
    Rejected,
    /// The view is not the trigger.
    Ignored,
}

/// Host-side stand-in for `MainActivity`: loads the native library, then
/// wires the views to a presenter.
pub struct SumActivity<S> {
    presenter: SumPresenter<NativeAdder, S>,
    trigger: FieldId,
}

impl<S: MessageSurface> SumActivity<S> {
    /// The library load happens before the presenter exists, so no click
    /// can reach the adder without it.
    pub fn create(config: &SampleConfig, surface: S) -> SampleResult<Self> {
        Self::create_from(&config.library_source(), config, surface)
    }

    pub fn create_from(
        source: &LibrarySource,
        config: &SampleConfig,
        surface: S,
    ) -> SampleResult<Self> {
        let library = NativeLibrary::initialize(source, &config.library.symbol)?;
        Ok(Self::with_library(config, &library, surface))
    }

    pub fn with_library(config: &SampleConfig, library: &NativeLibrary, surface: S) -> Self {
        log_info(&format!(
            "binding views {}, {} -> {}",
            config.fields.first, config.fields.second, config.fields.trigger
        ));
        let presenter = SumPresenter::new(
            config.first_field(),
            config.second_field(),
            library.adder(),
            surface,
        )
        .with_message_prefix(config.ui.message_prefix.clone())
        .with_duration(config.ui.toast_duration.into());
        Self {
            presenter,
            trigger: config.trigger_field(),
        }
    }

    pub fn enter_text(&mut self, field: &FieldId, text: &str) -> SampleResult<()> {
        self.presenter.set_text(field, text)?;
        Ok(())
    }

    pub fn click(&mut self, view: &FieldId) -> SampleResult<ClickOutcome> {
        if view == &self.trigger {
            return Ok(match self.presenter.on_trigger() {
                Ok(sum) => ClickOutcome::Sum(sum),
                Err(_) => ClickOutcome::Rejected,
            });
        }
        if self.presenter.has_field(view) {
            Ok(ClickOutcome::Ignored)
        } else {
            Err(PresentationError::UnknownField(view.clone()).into())
        }
    }

    pub fn trigger(&self) -> &FieldId {
        &self.trigger
    }

    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }
}
