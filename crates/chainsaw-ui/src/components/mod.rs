pub(crate) mod atoms;
pub(crate) mod foundations;
pub(crate) mod locale_menu;
pub(crate) mod shell;
