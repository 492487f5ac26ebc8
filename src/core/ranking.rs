use crate::core::duration::parse_duration_tokens;
use crate::domain::model::{RankedReport, RankedSchool, School, SchoolRecord};
use crate::domain::ports::DistanceResolver;

/// Schools that survived the distance lookup, in input order.
#[derive(Debug, Default)]
pub struct Enrichment {
    pub schools: Vec<School>,
    pub dropped: Vec<String>,
}

/// Attaches travel data to each record and orders the result by duration.
pub struct RankingEngine<'a, D: DistanceResolver + ?Sized> {
    resolver: &'a D,
    origin: &'a str,
}

impl<'a, D: DistanceResolver + ?Sized> RankingEngine<'a, D> {
    pub fn new(resolver: &'a D, origin: &'a str) -> Self {
        Self { resolver, origin }
    }

    /// One lookup per record, awaited in order. A failed lookup drops the record.
    pub async fn enrich(&self, records: &[SchoolRecord]) -> Enrichment {
        let mut enrichment = Enrichment::default();

        for record in records {
            let destination = record.destination_address();
            tracing::debug!("Resolving distance to: {}", destination);

            match self.resolver.resolve(self.origin, &destination).await {
                Ok(travel) => {
                    tracing::debug!(
                        "📍 {} -> {} ({})",
                        destination,
                        travel.distance_text,
                        travel.duration_text
                    );
                    enrichment
                        .schools
                        .push(School::from_record(record).with_travel(travel));
                }
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Could not compute distance for destination: {} ({})",
                        destination,
                        e
                    );
                    enrichment.dropped.push(destination);
                }
            }
        }

        enrichment
    }

    pub async fn run(&self, records: &[SchoolRecord]) -> RankedReport {
        let candidates = records.len();
        let Enrichment { schools, dropped } = self.enrich(records).await;

        RankedReport {
            candidates,
            schools: rank(schools),
            dropped,
        }
    }
}

/// Stable ascending sort by parsed duration; equal durations keep input order.
pub fn rank(schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .filter_map(|school| {
            let Some(duration) = school.duration_text() else {
                tracing::warn!("Skipping {} without travel data", school.code);
                return None;
            };
            let duration_minutes = match parse_duration_tokens(duration) {
                Some(minutes) => minutes,
                None => {
                    tracing::warn!(
                        "⚠️ Unparseable duration '{}' for {} ranks as 0 minutes",
                        duration,
                        school.code
                    );
                    0
                }
            };
            Some(RankedSchool {
                school,
                duration_minutes,
            })
        })
        .collect();

    ranked.sort_by_key(|entry| entry.duration_minutes);
    ranked
}
