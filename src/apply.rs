//! Calling a function with a stored tuple of arguments.
//!
//! Fixtures keep their inputs as a tuple so that one `Case` type covers every
//! arity. [`Apply`] is implemented for every `Fn` taking up to eight
//! arguments; the tuple is cloned element by element on each call so a case
//! can be run any number of times.

/// A callable that can be invoked with the tuple `Args`.
pub trait Apply<Args> {
    type Output;

    fn apply(&self, args: &Args) -> Self::Output;
}

macro_rules! impl_apply {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> Apply<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
            $($arg: Clone,)*
        {
            type Output = Out;

            #[allow(non_snake_case, clippy::unused_unit)]
            fn apply(&self, args: &($($arg,)*)) -> Out {
                let ($($arg,)*) = args;
                (self)($($arg.clone()),*)
            }
        }
    };
}

impl_apply!();
impl_apply!(A);
impl_apply!(A, B);
impl_apply!(A, B, C);
impl_apply!(A, B, C, D);
impl_apply!(A, B, C, D, E);
impl_apply!(A, B, C, D, E, F);
impl_apply!(A, B, C, D, E, F, G);
impl_apply!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::Apply;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn answer() -> u8 {
        42
    }

    #[test]
    fn applies_function_pointers_and_closures() {
        assert_eq!(add.apply(&(2, 3)), 5);
        assert_eq!(answer.apply(&()), 42);

        let greet = |name: String, times: usize| name.repeat(times);
        assert_eq!(greet.apply(&("ab".to_string(), 2)), "abab");
    }

    #[test]
    fn stored_arguments_survive_repeated_calls() {
        let args = (vec![1, 2, 3],);
        let total = |v: Vec<i32>| v.into_iter().sum::<i32>();
        assert_eq!(total.apply(&args), 6);
        assert_eq!(total.apply(&args), 6);
        assert_eq!(args.0.len(), 3);
    }

    #[test]
    fn eight_arguments() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            [a, b, c, d, e, f, g, h].iter().map(|&x| x as u32).sum::<u32>()
        };
        assert_eq!(sum.apply(&(1, 2, 3, 4, 5, 6, 7, 8)), 36);
    }
}
