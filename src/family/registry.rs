//! Family registry and report-type selection.
//!
//! Both registries are fixed at compile time: family names resolve through
//! the [`FamilyName`] enum, report types through a one-entry const table.
//! Neither lookup can fail — unknown family names fall back to the default
//! family with a warning, unknown report types fall back to the general
//! report operation silently.

use super::default::DefaultFamily;
use super::far_part10::FarPart10Family;
use super::params::ReportParams;
use super::PromptFamily;
use crate::config::Config;
use std::fmt;
use std::str::FromStr;

/// Names of the registered prompt families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyName {
    /// The base family with generic research wording.
    Default,
    /// The FAR Part 10 market-research family.
    FarPart10,
}

impl FamilyName {
    /// The registry name for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyName::Default => "Default",
            FamilyName::FarPart10 => "FARPart10",
        }
    }
}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Default" => Ok(FamilyName::Default),
            "FARPart10" => Ok(FamilyName::FarPart10),
            _ => Err(()),
        }
    }
}

/// Retrieve the prompt family registered under `name`.
///
/// Unknown names fall back to the default family; the fallback emits one
/// `tracing` warning naming the unrecognized value and execution
/// continues. The optional `config` is handed to the family constructor
/// either way.
pub fn get_prompt_family(name: &str, config: Option<Config>) -> Box<dyn PromptFamily> {
    match name.parse::<FamilyName>() {
        Ok(FamilyName::Default) => Box::new(DefaultFamily::new(config)),
        Ok(FamilyName::FarPart10) => Box::new(FarPart10Family::new(config)),
        Err(()) => {
            tracing::warn!(family = name, "unknown prompt family, using Default");
            Box::new(DefaultFamily::new(config))
        }
    }
}

/// A report-generation operation, dispatched over a family instance.
pub type ReportPromptFn = fn(&dyn PromptFamily, &ReportParams) -> String;

fn research_report(family: &dyn PromptFamily, params: &ReportParams) -> String {
    family.generate_report_prompt(params)
}

/// Report-type name → report operation. One entry today; differentiated
/// report prompts slot in here.
const REPORT_TYPE_TABLE: &[(&str, ReportPromptFn)] = &[("ResearchReport", research_report)];

/// Resolve the report operation for a report type.
///
/// Unknown report types resolve to the general report operation with no
/// warning.
pub fn get_prompt_by_report_type(report_type: &str) -> ReportPromptFn {
    REPORT_TYPE_TABLE
        .iter()
        .find(|(name, _)| *name == report_type)
        .map(|(_, op)| *op)
        .unwrap_or(research_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{span, Event, Level, Metadata, Subscriber};

    /// Counts WARN events so tests can observe the fallback warning.
    struct WarnCounter {
        warnings: Arc<AtomicUsize>,
    }

    impl Subscriber for WarnCounter {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() == Level::WARN
        }

        fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::WARN {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    /// Run `f` under a warning-counting subscriber and return the count.
    fn count_warnings(f: impl FnOnce()) -> usize {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = WarnCounter {
            warnings: Arc::clone(&warnings),
        };
        tracing::subscriber::with_default(subscriber, f);
        warnings.load(Ordering::SeqCst)
    }

    #[test]
    fn family_name_round_trips_through_str() {
        for name in [FamilyName::Default, FamilyName::FarPart10] {
            assert_eq!(name.as_str().parse::<FamilyName>(), Ok(name));
        }
        assert_eq!("NoSuchFamily".parse::<FamilyName>(), Err(()));
    }

    #[test]
    fn unknown_family_behaves_like_default() {
        let params = ReportParams::new("q", "ctx", "web");
        let fallback = get_prompt_family("NoSuchFamily", None).generate_report_prompt(&params);
        let default = get_prompt_family("Default", None).generate_report_prompt(&params);
        assert_eq!(fallback, default);
    }

    #[test]
    fn unknown_family_warns_exactly_once() {
        let count = count_warnings(|| {
            let _ = get_prompt_family("NoSuchFamily", None);
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn registered_families_do_not_warn() {
        let count = count_warnings(|| {
            let _ = get_prompt_family("Default", None);
            let _ = get_prompt_family("FARPart10", None);
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn far_family_report_differs_observably_from_default() {
        let params = ReportParams::new("q", "ctx", "web");
        let far = get_prompt_family("FARPart10", None).generate_report_prompt(&params);
        let default = get_prompt_family("Default", None).generate_report_prompt(&params);

        assert!(far.contains("socio-economic status"));
        assert!(!default.contains("socio-economic status"));
    }

    #[test]
    fn factory_threads_config_through() {
        let config = Config::default();
        // Config is opaque to templates; construction must simply accept it.
        let family = get_prompt_family("FARPart10", Some(config));
        let prompt = family.generate_report_prompt(&ReportParams::new("q", "ctx", "web"));
        assert!(prompt.contains("FAR Part 10"));
    }

    #[test]
    fn report_type_lookup_defaults_to_general_report() {
        let family = get_prompt_family("Default", None);
        let params = ReportParams::new("q", "ctx", "web");

        let known = get_prompt_by_report_type("ResearchReport")(family.as_ref(), &params);
        let unknown = get_prompt_by_report_type("anything-else")(family.as_ref(), &params);
        assert_eq!(known, unknown);
    }
}
