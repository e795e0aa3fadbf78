pub mod app {
    pub mod balance;
    pub mod quickstart;

    #[cfg(test)]
    pub(crate) mod mock;
}

pub mod libs {
    pub mod config;
    pub mod errors;
    pub mod trace;
    pub mod writing;
    pub mod zen;
}
