/// Turns an analogue voltage (mV) into a digital reading, given some context
/// the conversion depends on.
pub trait Adc<Ctx> {
    type Digital;

    fn to_digital(&self, context: Ctx, millivolts: f64) -> Self::Digital;
}

// Default/Pass-through implementation (NO-OP)
impl Adc<()> for () {
    type Digital = f64;

    fn to_digital(&self, _: (), millivolts: f64) -> Self::Digital {
        millivolts
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pass_through() {
        assert_eq!(().to_digital((), 4.096), 4.096);
    }
}
