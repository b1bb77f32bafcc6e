/// Create getter/setter pairs for EpiModel implementations that store
/// parameters as plain fields.
macro_rules! epi_param_methods {
    (by_field: { $($name:ident),* $(,)? }) => {
        $(
            fn $name(&self) -> Real {
                self.$name
            }

            paste! {
                fn [<set_ $name>](&mut self, value: Real) -> &mut Self {
                    self.$name = value;
                    return self;
                }
            }
        )*
    };
}
