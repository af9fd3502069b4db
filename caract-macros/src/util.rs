use syn::{parse_quote as q, Path};

#[allow(non_snake_case)]
#[derive(Clone)]
pub struct Paths {
    pub create_element: Path,

    pub Child: Path,
    pub PropMap: Path,
    pub PropValue: Path,
}

impl Paths {
    fn new() -> Self {
        Self {
            create_element: q!(::caract::create_element),
            Child: q!(::caract::Child),
            PropMap: q!(::caract::PropMap),
            PropValue: q!(::caract::PropValue),
        }
    }
}

pub fn paths() -> Paths {
    Paths::new()
}
