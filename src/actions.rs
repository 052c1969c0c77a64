use crate::{
    models::Selection,
    predict::Predict,
    render::{render, Output},
    state::Session,
    store::Store,
    validate::{resolve_gender, validate_name},
};

impl<P: Predict> Session<P> {
    /// Submit the name for prediction. The saved record for the name is
    /// shown right away; the prediction lands in the result region once the
    /// round-trip resolves.
    pub async fn submit(&mut self, raw_name: &str) {
        let name = raw_name.trim();

        if let Err(rejection) = validate_name(name) {
            render(&mut self.regions, Output::Error(rejection.to_string()));
            return;
        }
        render(&mut self.regions, Output::ClearError);

        self.refresh_saved(name);

        match self.client.fetch(name).await {
            Ok(prediction) => {
                self.last_prediction = prediction.gender;
                render(&mut self.regions, Output::Prediction(prediction));
            }
            Err(failure) => render(&mut self.regions, Output::Error(failure.to_string())),
        }
    }

    /// Persist a gender for the name: an explicit toggle wins, otherwise the
    /// last predicted gender is used.
    pub fn save(&mut self, raw_name: &str, selection: Selection) {
        let name = raw_name.trim();

        if let Err(rejection) = validate_name(name) {
            render(&mut self.regions, Output::Error(rejection.to_string()));
            return;
        }

        let gender = match resolve_gender(selection, self.last_prediction) {
            Ok(gender) => gender,
            Err(rejection) => {
                render(&mut self.regions, Output::Error(rejection.to_string()));
                return;
            }
        };
        render(&mut self.regions, Output::ClearError);

        if let Err(failure) = self.store.set(name, &gender.to_string()) {
            render(&mut self.regions, Output::Error(failure.to_string()));
            return;
        }

        self.refresh_saved(name);
    }

    /// Delete the saved record for the name. Clearing a name that was never
    /// saved is not an error.
    pub fn clear(&mut self, raw_name: &str) {
        let name = raw_name.trim();

        if let Err(rejection) = validate_name(name) {
            render(&mut self.regions, Output::Error(rejection.to_string()));
            return;
        }
        render(&mut self.regions, Output::ClearError);

        if let Err(failure) = self.store.remove(name) {
            render(&mut self.regions, Output::Error(failure.to_string()));
            return;
        }

        self.refresh_saved(name);
    }

    fn refresh_saved(&mut self, name: &str) {
        let record = self.store.get(name);
        render(&mut self.regions, Output::Saved(record));
    }
}
