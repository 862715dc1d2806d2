pub mod db;
pub mod errors;
pub mod partition;
pub mod tenant {
    pub mod entity;
    pub mod store;
}
pub mod tabung_type {
    pub mod entity;
    pub mod repository;
}
pub mod tabung {
    pub mod entity;
    pub mod repository;
}
pub mod kutipan {
    pub mod entity;
    pub mod repository;
}
pub mod cadangan {
    pub mod entity;
    pub mod repository;
}
