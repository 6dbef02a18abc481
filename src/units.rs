#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct SideLength(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);
