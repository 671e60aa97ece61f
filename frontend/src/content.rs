//! Static content records shared by every page.

use crate::icons::Icon;
use crate::theme::{Accent, TileSpan};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub span: TileSpan,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub value: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmploymentKind {
    FullTime,
    Contract,
    Internship,
}

impl EmploymentKind {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentKind::FullTime => "Full-time",
            EmploymentKind::Contract => "Contract",
            EmploymentKind::Internship => "Internship",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JobPosting {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: EmploymentKind,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
}

/// Everything a service or solution page renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OfferingContent {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub accent: Accent,
    pub metrics: &'static [Metric],
    pub features: &'static [Feature],
    pub process: &'static [ProcessStep],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [FaqEntry],
    pub cta_title: &'static str,
    pub cta_body: &'static str,
}

/// Checks that a metric strip only ever shows plausible numbers while its
/// counters run: the animated part is a whole number and the suffix is a unit,
/// never the tail of a decimal.
#[cfg(test)]
pub(crate) fn assert_whole_unit_metrics(metrics: &[Metric]) {
    use crate::animation::counter::{format_counter, CounterAnimator, DEFAULT_DURATION_MS};
    use crate::animation::easing::Easing;

    for metric in metrics {
        assert!(
            !metric.suffix.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == ','),
            "{:?} hides part of its number in the suffix",
            metric.label
        );

        let mut counter = CounterAnimator::new(metric.value, DEFAULT_DURATION_MS, Easing::Linear);
        for now in [0.0, 700.0, 1_400.0, 2_000.0] {
            let shown = format_counter(counter.sample(now).value, metric.prefix, metric.suffix);
            let number = shown
                .strip_prefix(metric.prefix)
                .and_then(|rest| rest.strip_suffix(metric.suffix))
                .unwrap_or_default()
                .replace(',', "");
            let number: u64 = number.parse().unwrap_or_else(|_| panic!("{shown:?} is not a whole number"));
            assert!(number <= metric.value, "{shown:?} overshoots {}", metric.value);
        }
    }
}
