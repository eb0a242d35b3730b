//! Brainstorming techniques offered by the application form.

/// A named brainstorming methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    FiveWhys,
    Starbursting,
    Swot,
    PortersFiveForces,
    SixThinkingHats,
    Scamper,
    Charrette,
    Stepladder,
}

impl Technique {
    pub const ALL: [Technique; 8] = [
        Technique::FiveWhys,
        Technique::Starbursting,
        Technique::Swot,
        Technique::PortersFiveForces,
        Technique::SixThinkingHats,
        Technique::Scamper,
        Technique::Charrette,
        Technique::Stepladder,
    ];

    /// Key sent by the browser client.
    pub fn name(self) -> &'static str {
        match self {
            Technique::FiveWhys => "5 Whys",
            Technique::Starbursting => "Starbursting",
            Technique::Swot => "SWOT",
            Technique::PortersFiveForces => "Porters 5 Forces",
            Technique::SixThinkingHats => "Six Thinking Hats",
            Technique::Scamper => "SCAMPER",
            Technique::Charrette => "Charrette",
            Technique::Stepladder => "Stepladder",
        }
    }

    pub fn context(self) -> &'static str {
        match self {
            Technique::FiveWhys => {
                "The 5 Whys technique involves asking \"why\" repeatedly (typically five times) to drill down to the root cause of a problem."
            }
            Technique::Starbursting => {
                "Starbursting focuses on generating questions rather than answers, using Who, What, When, Where, Why, and How."
            }
            Technique::Swot => {
                "SWOT Analysis examines Strengths, Weaknesses, Opportunities, and Threats related to a business situation."
            }
            Technique::PortersFiveForces => {
                "Porter's 5 Forces analyzes competitive rivalry, supplier power, buyer power, threat of substitution, and threat of new entry."
            }
            Technique::SixThinkingHats => {
                "Six Thinking Hats uses six different perspectives: White (facts), Red (emotions), Black (caution), Yellow (optimism), Green (creativity), Blue (process)."
            }
            Technique::Scamper => {
                "SCAMPER is a creative thinking technique: Substitute, Combine, Adapt, Modify, Put to other uses, Eliminate, Reverse."
            }
            Technique::Charrette => {
                "Charrette is a collaborative planning process involving multiple stakeholders in intensive workshops."
            }
            Technique::Stepladder => {
                "Stepladder technique introduces team members one at a time to ensure all voices are heard before group discussion."
            }
        }
    }

    /// Exact, case-sensitive match on the client key.
    pub fn from_name(name: &str) -> Option<Technique> {
        super::TECHNIQUES_BY_NAME.get(name).copied()
    }
}
