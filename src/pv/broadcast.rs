//! Index-aligned pairing of input lists with the surface list.

use super::error::{InputField, PvError};

/// Fails if `len` exceeds the number of surfaces.
pub fn check_len(input: InputField, len: usize, surfaces: usize) -> Result<(), PvError> {
    if len > surfaces {
        return Err(PvError::LengthMismatch {
            input,
            len,
            surfaces,
        });
    }
    Ok(())
}

/// Expands `values` to exactly `count` entries.
///
/// Missing trailing entries reuse the first value. An empty list yields
/// `default` for every entry, or `MissingInput` if there is no default.
pub fn broadcast<T: Clone>(
    input: InputField,
    values: &[T],
    count: usize,
    default: Option<T>,
) -> Result<Vec<T>, PvError> {
    check_len(input, values.len(), count)?;
    let Some(first) = values.first() else {
        return match default {
            Some(d) => Ok(vec![d; count]),
            None => Err(PvError::MissingInput(input)),
        };
    };
    Ok((0..count)
        .map(|i| values.get(i).unwrap_or(first).clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_single_value() {
        let v = broadcast(InputField::CellEfficiency, &[0.2], 3, None).unwrap();
        assert_eq!(v, vec![0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_broadcast_shorter_list_reuses_first() {
        let v = broadcast(InputField::ModulesInSeries, &[4_u32, 7], 4, None).unwrap();
        assert_eq!(v, vec![4, 7, 4, 4]);
    }

    #[test]
    fn test_broadcast_default() {
        let v = broadcast(InputField::CostPerModule, &[], 2, Some(0.)).unwrap();
        assert_eq!(v, vec![0., 0.]);
        let err = broadcast::<f64>(InputField::PowerPerModule, &[], 2, None).unwrap_err();
        assert_eq!(err, PvError::MissingInput(InputField::PowerPerModule));
    }

    #[test]
    fn test_broadcast_longer_list_fails() {
        let err = broadcast(InputField::CostPerModule, &[1., 2., 3.], 2, Some(0.)).unwrap_err();
        assert_eq!(
            err,
            PvError::LengthMismatch {
                input: InputField::CostPerModule,
                len: 3,
                surfaces: 2
            }
        );
    }
}
