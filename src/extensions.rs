use crate::errors::{MdError, Result};

pub trait ArgsExt {
    fn get_required(&self, index: usize, line: usize) -> Result<&str>;
    fn parse_int_at(&self, index: usize, line: usize) -> Result<i64>;
    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64>;
}

impl ArgsExt for [&str] {
    fn get_required(&self, index: usize, line: usize) -> Result<&str> {
        self.get(index)
            .copied()
            .ok_or(MdError::MissingArgument { line })
    }

    fn parse_int_at(&self, index: usize, line: usize) -> Result<i64> {
        let arg = self.get_required(index, line)?;
        arg.parse().map_err(|e| MdError::IntParseError {
            string: arg.to_string(),
            source: e,
        })
    }

    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64> {
        let arg = self.get_required(index, line)?;
        arg.parse().map_err(|e| MdError::FloatParseError {
            string: arg.to_string(),
            source: e,
        })
    }
}

pub trait IntToUnsigned {
    fn convert_to_usize(&self, line: usize) -> Result<usize>;
    fn convert_to_u32(&self, line: usize) -> Result<u32>;
}

impl IntToUnsigned for i64 {
    fn convert_to_usize(&self, line: usize) -> Result<usize> {
        (*self).try_into().map_err(|_| MdError::NegativeValue {
            value: *self,
            line,
        })
    }

    fn convert_to_u32(&self, line: usize) -> Result<u32> {
        (*self).try_into().map_err(|_| MdError::NegativeValue {
            value: *self,
            line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments_by_position() {
        let args = ["2.5", "12", "-3"];
        let args: &[&str] = &args;

        assert_eq!(args.parse_float_at(0, 1).unwrap(), 2.5);
        assert_eq!(args.parse_int_at(1, 1).unwrap(), 12);
        assert!(matches!(
            args.get_required(3, 7),
            Err(MdError::MissingArgument { line: 7 })
        ));
        assert!(matches!(
            args.parse_int_at(0, 1),
            Err(MdError::IntParseError { .. })
        ));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert_eq!(4i64.convert_to_usize(1).unwrap(), 4);
        assert!(matches!(
            (-3i64).convert_to_u32(9),
            Err(MdError::NegativeValue { value: -3, line: 9 })
        ));
    }
}
