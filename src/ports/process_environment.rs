/// Port for the environment of the running process.
pub trait ProcessEnvironment {
    /// Current value of a variable; `None` if unset or not valid Unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a variable for this process and its future children.
    fn set(&self, key: &str, value: &str);

    /// Remove a variable. No-op if it is not set.
    fn remove(&self, key: &str);

    /// Home directory of the current user, from `HOME` or `USERPROFILE`.
    fn home_dir(&self) -> Option<String> {
        ["HOME", "USERPROFILE"]
            .into_iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.trim().is_empty())
    }
}
