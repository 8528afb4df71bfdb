//! Call-flow stages
//!
//! A call carries no server-side state; the stage is only attached to log
//! events so a single call can be followed across both webhooks.

use std::fmt;

/// Where a call is in the turn-based flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStage {
    Idle,
    Greeted,
    Recording,
    Transcribing,
    Responded,
    Terminated,
}

impl CallStage {
    /// The following stage; the flow is strictly linear
    pub fn next(self) -> Option<CallStage> {
        match self {
            CallStage::Idle => Some(CallStage::Greeted),
            CallStage::Greeted => Some(CallStage::Recording),
            CallStage::Recording => Some(CallStage::Transcribing),
            CallStage::Transcribing => Some(CallStage::Responded),
            CallStage::Responded => Some(CallStage::Terminated),
            CallStage::Terminated => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallStage::Idle => "idle",
            CallStage::Greeted => "greeted",
            CallStage::Recording => "recording",
            CallStage::Transcribing => "transcribing",
            CallStage::Responded => "responded",
            CallStage::Terminated => "terminated",
        }
    }
}

impl fmt::Display for CallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_are_linear() {
        let mut stage = CallStage::Idle;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            visited.push(next);
            stage = next;
        }

        assert_eq!(
            visited,
            vec![
                CallStage::Idle,
                CallStage::Greeted,
                CallStage::Recording,
                CallStage::Transcribing,
                CallStage::Responded,
                CallStage::Terminated,
            ]
        );
    }

    #[test]
    fn test_terminated_is_final() {
        assert_eq!(CallStage::Terminated.next(), None);
        assert_eq!(CallStage::Transcribing.to_string(), "transcribing");
    }
}
