//! Business icons whose thinking style can frame a response.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    JackMa,
    SteveJobs,
    PeterDrucker,
    MotherTheresa,
    NikolaTesla,
    SakichiToyoda,
    EsteeLauder,
    ThomasEdison,
    HenryFord,
    AndrewCarnegie,
    SamWalton,
    CharlesSchwab,
    BillGates,
    WarrenBuffett,
    IndraNooyi,
    GraceHopper,
    MartinLutherKing,
}

impl Persona {
    pub const ALL: [Persona; 17] = [
        Persona::JackMa,
        Persona::SteveJobs,
        Persona::PeterDrucker,
        Persona::MotherTheresa,
        Persona::NikolaTesla,
        Persona::SakichiToyoda,
        Persona::EsteeLauder,
        Persona::ThomasEdison,
        Persona::HenryFord,
        Persona::AndrewCarnegie,
        Persona::SamWalton,
        Persona::CharlesSchwab,
        Persona::BillGates,
        Persona::WarrenBuffett,
        Persona::IndraNooyi,
        Persona::GraceHopper,
        Persona::MartinLutherKing,
    ];

    /// Key sent by the browser client. Spellings must stay in sync with the
    /// `<select>` options in `templates/app.html`.
    pub fn name(self) -> &'static str {
        match self {
            Persona::JackMa => "Jack Ma",
            Persona::SteveJobs => "Steve Jobs",
            Persona::PeterDrucker => "Peter Drucker",
            Persona::MotherTheresa => "Mother Theresa",
            Persona::NikolaTesla => "Nikola Tesla",
            Persona::SakichiToyoda => "Sakichi Toyoda",
            Persona::EsteeLauder => "Estee Lauder",
            Persona::ThomasEdison => "Thomas Edision",
            Persona::HenryFord => "Henry Ford",
            Persona::AndrewCarnegie => "Andrew Carnegie",
            Persona::SamWalton => "Sam Walton",
            Persona::CharlesSchwab => "Charles Schwab",
            Persona::BillGates => "Bill Gates",
            Persona::WarrenBuffett => "Warren Buffett",
            Persona::IndraNooyi => "Indra Nooyi",
            Persona::GraceHopper => "Grace Hopper",
            Persona::MartinLutherKing => "Martin Luther King",
        }
    }

    pub fn perspective(self) -> &'static str {
        match self {
            Persona::JackMa => {
                "emphasizing customer-first thinking, persistence through rejection, and building ecosystems"
            }
            Persona::SteveJobs => {
                "focusing on design perfection, user experience, and thinking differently"
            }
            Persona::PeterDrucker => {
                "applying management science, asking what the customer values, and measuring what matters"
            }
            Persona::MotherTheresa => {
                "prioritizing compassion, serving the most vulnerable, and doing small things with great love"
            }
            Persona::NikolaTesla => {
                "envisioning revolutionary innovation, pursuing wireless possibilities, and thinking decades ahead"
            }
            Persona::SakichiToyoda => {
                "applying the philosophy of continuous improvement (Kaizen) and asking why five times"
            }
            Persona::EsteeLauder => {
                "building personal relationships, believing in the product, and understanding customer aspirations"
            }
            Persona::ThomasEdison => {
                "experimenting persistently, learning from failure, and making innovation practical"
            }
            Persona::HenryFord => {
                "standardizing processes, making products accessible, and empowering workers"
            }
            Persona::AndrewCarnegie => {
                "building strategic partnerships, vertical integration, and philanthropic legacy"
            }
            Persona::SamWalton => {
                "obsessing over customer savings, learning from competition, and empowering associates"
            }
            Persona::CharlesSchwab => {
                "democratizing access, reducing costs, and putting investor interests first"
            }
            Persona::BillGates => {
                "scaling technology for mass impact, strategic partnerships, and data-driven decisions"
            }
            Persona::WarrenBuffett => {
                "seeking long-term value, understanding competitive moats, and staying within competence"
            }
            Persona::IndraNooyi => {
                "balancing performance with purpose, thinking long-term, and strategic portfolio management"
            }
            Persona::GraceHopper => {
                "making technology accessible, challenging the status quo, and asking forgiveness not permission"
            }
            Persona::MartinLutherKing => {
                "appealing to moral principles, building coalitions, and envisioning a better future"
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Persona> {
        super::PERSONAS_BY_NAME.get(name).copied()
    }
}
