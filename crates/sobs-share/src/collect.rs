//! Sequential per-brand sample collection.

use std::collections::HashMap;

use sobs_core::{Brand, KeywordVolumeProvider, Sample, Settings, VolumeRequest};
use uuid::Uuid;

/// A brand whose provider call failed. Its volume is left out of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandWarning {
    pub brand: String,
    pub message: String,
}

/// Samples gathered for every brand that succeeded, plus one warning per
/// brand that did not.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub samples_by_brand: HashMap<Uuid, Vec<Sample>>,
    pub warnings: Vec<BrandWarning>,
}

/// Fetch samples for each eligible brand, one provider call at a time.
///
/// A failing brand is logged and recorded as a [`BrandWarning`]; the
/// remaining brands are still fetched.
pub async fn collect_samples<P>(provider: &P, brands: &[Brand], settings: &Settings) -> CollectOutcome
where
    P: KeywordVolumeProvider,
{
    let mut outcome = CollectOutcome::default();

    for brand in brands {
        if !brand.is_eligible() {
            tracing::debug!(brand = %brand.name, "skipping brand without name or keywords");
            continue;
        }

        let seeds = brand.active_keywords();
        let request = VolumeRequest {
            seeds: &seeds,
            location: &settings.location,
            network: settings.network,
            date_from: settings.date_from,
            date_to: settings.date_to,
        };

        match provider.fetch_keyword_volumes(&request).await {
            Ok(samples) => {
                tracing::info!(
                    brand = %brand.name,
                    keywords = seeds.len(),
                    samples = samples.len(),
                    "fetched keyword volumes"
                );
                outcome.samples_by_brand.insert(brand.id, samples);
            }
            Err(e) => {
                tracing::warn!(brand = %brand.name, error = %e, "keyword volume fetch failed");
                outcome.warnings.push(BrandWarning {
                    brand: brand.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use sobs_core::{Granularity, Location, Network, YearMonth};

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct FakeError(String);

    /// Answers by first seed; unknown seeds fail.
    struct FakeProvider {
        responses: HashMap<String, Vec<Sample>>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl FakeProvider {
        fn new(responses: &[(&str, Vec<Sample>)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), v.clone()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl KeywordVolumeProvider for FakeProvider {
        type Error = FakeError;

        async fn fetch_keyword_volumes(
            &self,
            request: &VolumeRequest<'_>,
        ) -> Result<Vec<Sample>, Self::Error> {
            self.calls.lock().unwrap().push(request.seeds.to_vec());
            let first = request.seeds.first().cloned().unwrap_or_default();
            self.responses
                .get(&first)
                .cloned()
                .ok_or_else(|| FakeError(format!("quota exceeded for {first}")))
        }
    }

    fn settings() -> Settings {
        Settings {
            location: Location::All,
            network: Network::GoogleSearch,
            date_from: YearMonth::new(2024, 1).unwrap(),
            date_to: YearMonth::new(2024, 3).unwrap(),
            granularity: Granularity::Monthly,
        }
    }

    #[tokio::test]
    async fn failing_brand_becomes_warning_and_others_continue() {
        let a = Brand::new("A", &["a"], true, "#1f77b4");
        let b = Brand::new("B", &["b"], false, "#ff7f0e");
        let c = Brand::new("C", &["c"], false, "#2ca02c");
        let provider = FakeProvider::new(&[
            ("a", vec![Sample::new("a", 2024, 1, 10)]),
            ("c", vec![Sample::new("c", 2024, 1, 30)]),
        ]);

        let brands = vec![a.clone(), b, c.clone()];
        let outcome = collect_samples(&provider, &brands, &settings()).await;

        assert_eq!(outcome.samples_by_brand.len(), 2);
        assert!(outcome.samples_by_brand.contains_key(&a.id));
        assert!(outcome.samples_by_brand.contains_key(&c.id));
        assert_eq!(
            outcome.warnings,
            vec![BrandWarning {
                brand: "B".to_string(),
                message: "quota exceeded for b".to_string(),
            }]
        );
        assert_eq!(provider.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn ineligible_brands_are_not_requested() {
        let a = Brand::new("A", &[" a ", ""], true, "#1f77b4");
        let empty = Brand::new("Empty", &[" "], false, "#ff7f0e");
        let provider = FakeProvider::new(&[("a", vec![])]);

        let outcome = collect_samples(&provider, &[a, empty], &settings()).await;

        assert!(outcome.warnings.is_empty());
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec![vec!["a".to_string()]],
            "only trimmed active keywords of eligible brands are sent"
        );
    }

    #[tokio::test]
    async fn brands_are_requested_in_configured_order() {
        let brands = vec![
            Brand::new("Z", &["z"], false, "#1f77b4"),
            Brand::new("M", &["m"], false, "#ff7f0e"),
            Brand::new("A", &["a"], true, "#2ca02c"),
        ];
        let provider = FakeProvider::new(&[("z", vec![]), ("m", vec![]), ("a", vec![])]);

        collect_samples(&provider, &brands, &settings()).await;

        let order: Vec<String> = provider
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|seeds| seeds[0].clone())
            .collect();
        assert_eq!(order, vec!["z", "m", "a"]);
    }
}
