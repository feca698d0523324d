#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    #[default]
    Auto,
    Fixed,
}

impl TableLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableLayout::Auto => "auto",
            TableLayout::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Right,
}

impl CellAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            CellAlign::Left => "left",
            CellAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: String,
    pub header: String,
    pub align: CellAlign,
}

impl ColumnDef {
    pub fn new(key: &str, header: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            header: header.into(),
            align: CellAlign::Left,
        }
    }

    pub fn aligned(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }
}

/// Everything the shared table component needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub id: String,
    pub columns: Vec<ColumnDef>,
    pub data: Vec<Vec<String>>,
    pub is_loading: bool,
    pub layout: TableLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableDisplayState {
    Loading,
    Empty,
    Populated,
}

impl TableConfig {
    pub fn display_state(&self) -> TableDisplayState {
        if self.is_loading {
            TableDisplayState::Loading
        } else if self.data.is_empty() {
            TableDisplayState::Empty
        } else {
            TableDisplayState::Populated
        }
    }
}
