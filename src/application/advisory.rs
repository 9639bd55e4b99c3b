//! Advisory Use Case
//!
//! Boundary around the external advisor: hands it an owned snapshot and turns
//! every failure into a message the user can read. Never retries.

use crate::domain::entities::Application;
use crate::domain::ports::{snapshot, AdvisoryError, PortfolioAdvisor};

const NO_ANSWER: &str = "No insights generated.";

pub struct AdvisoryUseCase<A>
where
    A: PortfolioAdvisor,
{
    advisor: A,
}

impl<A> AdvisoryUseCase<A>
where
    A: PortfolioAdvisor,
{
    pub fn new(advisor: A) -> Self {
        Self { advisor }
    }

    /// Ask a question about `apps`. The credential is checked before the
    /// advisor is called.
    pub fn ask(&self, apps: &[Application], question: &str, credential: Option<&str>) -> String {
        let credential = match credential.map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => return describe(&AdvisoryError::MissingCredential),
        };

        let snapshot = snapshot(apps);
        tracing::debug!(entries = snapshot.len(), "asking advisor");
        match self.advisor.ask(&snapshot, question, credential) {
            Ok(answer) if answer.trim().is_empty() => NO_ANSWER.to_string(),
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "advisory request failed");
                describe(&err)
            }
        }
    }
}

fn describe(err: &AdvisoryError) -> String {
    match err {
        AdvisoryError::MissingCredential => {
            "Configuration Error: provide an advisory service credential to continue.".to_string()
        }
        AdvisoryError::EmptyResponse => NO_ANSWER.to_string(),
        AdvisoryError::InvalidCredential | AdvisoryError::Unavailable(_) => {
            concat!(
                "Analysis Failed: unable to reach the advisory service. ",
                "Check the credential and connection."
            )
            .to_string()
        }
    }
}
