/// The reverse direction of [`super::Adc`]: a digital quantity back to the
/// voltage (mV) that represents it.
pub trait Dac {
    type Digital;

    fn to_voltage(&self, digital: Self::Digital) -> f64;
}

impl Dac for () {
    type Digital = f64;

    fn to_voltage(&self, digital: Self::Digital) -> f64 {
        digital
    }
}

impl Dac for crate::core::ColdJunctionCoefficients {
    type Digital = f64;

    #[inline]
    fn to_voltage(&self, celsius: Self::Digital) -> f64 {
        crate::core::func::cold_junction(celsius, self)
    }
}
