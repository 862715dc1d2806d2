use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Fund categories
    TabungType,
    /// Collection campaigns
    Tabung,
    /// Recorded contributions
    Kutipan,
}
