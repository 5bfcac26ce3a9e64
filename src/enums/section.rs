/// The four independent dashboard sections, each with its own state slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TopFoods,
    Frequency,
    Category,
    User,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::TopFoods => "top foods",
            Section::Frequency => "frequency by food",
            Section::Category => "consumption by category",
            Section::User => "user responses",
        }
    }
}
