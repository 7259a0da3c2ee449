use std::fmt;

use crate::presentation::view_models::InitResultViewModel;

pub struct InitView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config file:      {}", self.data.config_path.display())?;
        writeln!(f, "Catalog source:   {}", self.data.source)?;
        writeln!(f, "Inflation rounds: {}", self.data.inflation_rounds)
    }
}

impl fmt::Display for InitResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        InitView::new(self).fmt(f)
    }
}
