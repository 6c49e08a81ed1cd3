use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::{Rgb888, RgbColor},
};
use paste::paste;

pub type StyleType = MonoTextStyle<'static, Rgb888>;

const DIM_GRAY: Rgb888 = Rgb888::new(0x69, 0x69, 0x69);

macro_rules! make_styles {
    ($color:expr, $color_ident:ident, [$($size:literal),+]) => {
        $(
            paste! {
                pub const [<STYLE_ $color_ident _ $size>]: StyleType = StyleType::new(&profont::[<PROFONT_ $size _POINT>], $color);
            }
        )+
    }
}

make_styles!(Rgb888::BLACK, BLACK, [10, 12]);
make_styles!(DIM_GRAY, GRAY, [10]);
