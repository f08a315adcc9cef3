//! Operator forwarding for the `dashu` newtypes.

/// Implements a binary operator for a newtype over a `dashu` value, for
/// every owned/borrowed combination the workspace uses.
macro_rules! forward_binop {
    ($ty:ident, $op:ident, $method:ident) => {
        impl ::std::ops::$op for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty(::std::ops::$op::$method(self.0, rhs.0))
            }
        }

        impl ::std::ops::$op<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(::std::ops::$op::$method(self.0, &rhs.0))
            }
        }

        impl ::std::ops::$op for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(::std::ops::$op::$method(&self.0, &rhs.0))
            }
        }
    };
}

/// Implements `Neg` for owned and borrowed newtype values.
macro_rules! forward_neg {
    ($ty:ident) => {
        impl ::std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-self.0)
            }
        }

        impl ::std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-&self.0)
            }
        }
    };
}
